//! 作答读取器 - 基础设施层
//!
//! 持有唯一的输入流，只暴露"读一行作答"的能力

use std::future::Future;
use std::io::{self, BufRead, BufReader};
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};
use std::thread;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::ReadFailure;
use crate::models::question::normalize;

/// 一次读取的结果：规范化后的作答文本，或读取失败
pub type ReadOutcome = Result<String, ReadFailure>;

type SharedInput = Arc<Mutex<Box<dyn BufRead + Send>>>;

/// 作答读取器
///
/// 职责：
/// - 持有唯一的输入流
/// - 每次 `request_read()` 启动一个独立线程，阻塞读取一行
/// - 每次请求恰好产出一个结果，即使调用方已不再等待
/// - 不认识题目，不处理计时
pub struct ResponseSource {
    input: SharedInput,
}

impl ResponseSource {
    /// 使用任意行输入流创建读取器
    pub fn new(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            input: Arc::new(Mutex::new(Box::new(reader))),
        }
    }

    /// 基于标准输入创建读取器
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }

    /// 发起一次读取
    ///
    /// 读取线程不会被中断：调用方丢弃 [`PendingRead`] 后，线程仍会读完这一行，
    /// 输入流位置照常前进，结果被直接丢弃。
    pub fn request_read(&self) -> PendingRead {
        let (tx, rx) = oneshot::channel();
        let input = Arc::clone(&self.input);

        let spawned = thread::Builder::new()
            .name("quiz-response-reader".to_string())
            .spawn(move || {
                let outcome = read_one_line(&input);
                if tx.send(outcome).is_err() {
                    debug!("会话已不再等待，丢弃迟到的作答");
                }
            });

        // 启动失败时闭包连同 tx 一起被释放，PendingRead 会得到 Disconnected
        if let Err(e) = spawned {
            warn!("⚠️ 无法启动读取线程: {}", e);
        }

        PendingRead { rx }
    }
}

/// 读取一行并规范化（去除首尾空白、转小写）
fn read_one_line(input: &Mutex<Box<dyn BufRead + Send>>) -> ReadOutcome {
    let mut reader = input.lock().unwrap_or_else(PoisonError::into_inner);

    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Err(ReadFailure::EndOfInput);
    }

    Ok(normalize(&line))
}

/// 进行中的一次读取
///
/// 作为 future 等待时得到 [`ReadOutcome`]；直接丢弃即放弃本次结果。
#[derive(Debug)]
pub struct PendingRead {
    rx: oneshot::Receiver<ReadOutcome>,
}

impl Future for PendingRead {
    type Output = ReadOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(ReadFailure::Disconnected)))
    }
}
