//! 会话计时器 - 基础设施层
//!
//! 整个会话只有一个倒计时，开始时启动一次，不按题目重置

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Sleep};

/// 计时器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// 倒计时进行中
    Armed,
    /// 已到时（只会被观察到一次）
    Fired,
    /// 已手动停止
    Stopped,
}

/// 会话计时器
#[derive(Debug)]
pub struct SessionTimer {
    sleep: Pin<Box<Sleep>>,
    deadline: Instant,
    state: TimerState,
}

impl SessionTimer {
    /// 启动倒计时
    pub fn arm(limit: Duration) -> Self {
        let deadline = Instant::now() + limit;
        Self {
            sleep: Box::pin(time::sleep_until(deadline)),
            deadline,
            state: TimerState::Armed,
        }
    }

    /// 等待到时
    ///
    /// 可以放在 `select!` 中反复等待：未到时被取消不会影响计时。
    /// 到时只会返回一次；停止后或已经返回过之后永远不再完成。
    pub async fn fired(&mut self) {
        if self.state != TimerState::Armed {
            return future::pending().await;
        }

        self.sleep.as_mut().await;
        self.state = TimerState::Fired;
    }

    /// 停止倒计时；已到时或已停止时不做任何事
    pub fn stop(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Stopped;
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// 距离到时还剩多少时间
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_limit() {
        let mut timer = SessionTimer::arm(Duration::from_secs(30));

        {
            let mut fired = task::spawn(timer.fired());
            assert_pending!(fired.poll());

            time::advance(Duration::from_secs(29)).await;
            assert_pending!(fired.poll());

            time::advance(Duration::from_secs(2)).await;
            assert_ready!(fired.poll());
        }

        assert_eq!(timer.state(), TimerState::Fired);
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_only_once() {
        let mut timer = SessionTimer::arm(Duration::from_secs(1));
        timer.fired().await;

        let mut again = task::spawn(timer.fired());
        time::advance(Duration::from_secs(5)).await;
        assert_pending!(again.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_timer_never_fires() {
        let mut timer = SessionTimer::arm(Duration::from_secs(1));
        timer.stop();
        assert_eq!(timer.state(), TimerState::Stopped);

        let mut fired = task::spawn(timer.fired());
        time::advance(Duration::from_secs(10)).await;
        assert_pending!(fired.poll());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_after_fire_is_noop() {
        let mut timer = SessionTimer::arm(Duration::from_millis(10));
        timer.fired().await;

        timer.stop();
        assert_eq!(timer.state(), TimerState::Fired);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_keeps_deadline() {
        let mut timer = SessionTimer::arm(Duration::from_secs(10));

        // 模拟 select! 中另一分支先完成
        {
            let mut fired = task::spawn(timer.fired());
            assert_pending!(fired.poll());
        }

        time::advance(Duration::from_secs(4)).await;
        assert_eq!(timer.remaining(), Duration::from_secs(6));

        time::advance(Duration::from_secs(7)).await;
        let mut fired = task::spawn(timer.fired());
        assert_ready!(fired.poll());
    }
}
