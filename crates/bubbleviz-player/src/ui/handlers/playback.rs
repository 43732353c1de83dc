//! Transport message handler
//!
//! Turns controller waits into timer tasks. Each wait becomes one abortable
//! `Task` sleeping for the wait's delay; its handle is the app's only pending
//! timer. Reset aborts it, pause lets it run out.

use iced::Task;

use bubbleviz_core::{PlaybackState, TimerToken, Wait};

use crate::ui::app::VisualizerApp;
use crate::ui::message::{Message, PlaybackMessage};

/// Handle the four transport controls
pub fn handle(app: &mut VisualizerApp, msg: PlaybackMessage) -> Task<Message> {
    use PlaybackMessage::*;

    match msg {
        TogglePlay => {
            if app.controller.is_running() {
                app.controller.pause();
                app.status = "Paused".to_string();
                return Task::none();
            }

            let wait = app.controller.play(&mut app.chart);
            app.status = if app.controller.engine().is_sorted() {
                "Already sorted, press Reset for a new dataset".to_string()
            } else {
                "Playing".to_string()
            };
            schedule(app, wait)
        }
        Step => match app.controller.step_once(&mut app.chart) {
            Ok(wait) => {
                app.status = "Stepping".to_string();
                schedule(app, Some(wait))
            }
            Err(e) => {
                log::debug!("step rejected: {}", e);
                app.status = e.to_string();
                Task::none()
            }
        },
        Reset => {
            cancel_timer(app);
            app.controller.reset(&mut app.chart);
            app.status = "New dataset".to_string();
            Task::none()
        }
        SetSpeed(speed_ms) => {
            app.speed_ms = speed_ms;
            app.controller.set_speed(speed_ms);
            Task::none()
        }
    }
}

/// Handle an elapsed controller wait
pub fn handle_timer(app: &mut VisualizerApp, token: TimerToken) -> Task<Message> {
    let current = matches!(app.pending_timer, Some((pending, _)) if pending == token);
    if current {
        app.pending_timer = None;
    }

    let wait = app.controller.on_timer(token, &mut app.chart);
    if wait.is_none() && app.controller.engine().is_sorted() {
        let stats = app.controller.engine().stats();
        app.status = format!(
            "Sorted: {} comparisons, {} swaps",
            stats.comparisons, stats.swaps
        );
    } else if current && app.controller.state() == PlaybackState::Idle {
        app.status = "Ready".to_string();
    }
    schedule(app, wait)
}

/// Arm a timer task for `wait`
fn schedule(app: &mut VisualizerApp, wait: Option<Wait>) -> Task<Message> {
    let Some(Wait { token, delay }) = wait else {
        return Task::none();
    };

    let (task, handle) = Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |_| Message::TimerElapsed(token),
    )
    .abortable();

    if let Some((previous, old_handle)) = app.pending_timer.replace((token, handle)) {
        log::warn!("schedule: replacing live timer {:?}", previous);
        old_handle.abort();
    }
    task
}

fn cancel_timer(app: &mut VisualizerApp) {
    if let Some((token, handle)) = app.pending_timer.take() {
        log::debug!("cancel_timer: aborting {:?}", token);
        handle.abort();
    }
}
