//! 标准输入输出会话
//!
//! 逐行读取请求，每个请求写出一行 JSON 响应，读到 EOF 时结束。

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::models::{ApiResponse, ErrorCode};
use crate::routes::handle_line;
use crate::services::RecordServices;

/// 会话统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub handled: usize,
    pub failed: usize,
}

pub fn serve<R: BufRead, W: Write>(
    services: &RecordServices,
    mut reader: R,
    mut writer: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // 非 UTF-8 的输入行按错误请求处理，会话继续
        let response = match std::str::from_utf8(&buf) {
            Ok(line) => match handle_line(services, line) {
                Some(response) => response,
                None => continue,
            },
            Err(e) => {
                warn!("Request line is not valid UTF-8: {}", e);
                ApiResponse::error_empty(ErrorCode::BadRequest, format!("Invalid request: {e}"))
                    .into_empty()
            }
        };

        summary.handled += 1;
        if !response.is_success() {
            summary.failed += 1;
        }

        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        // 表现层按行读取，每个响应立即刷新
        writer.flush()?;
        debug!("Response written with code {}", response.code);
    }

    info!(
        "Session finished: {} request(s), {} failed",
        summary.handled, summary.failed
    );
    Ok(summary)
}
