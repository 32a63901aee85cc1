use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use polyglot_core::{update, AppState, Debouncer, Msg, DEBOUNCE_WINDOW};
use polyglot_engine::{Gateway, GatewaySettings, HttpGateway};
use polyglot_logging::{polyglot_debug, polyglot_info, polyglot_warn};
use tokio::time::MissedTickBehavior;

use crate::effects::EffectRunner;
use crate::render::render;
use crate::snapshot::{FileChange, FileSnapshot};
use crate::WatchArgs;

/// Watches `args.file` until Ctrl-C, printing the session whenever it changes.
pub async fn watch(args: WatchArgs) -> anyhow::Result<()> {
    let gateway = HttpGateway::new(GatewaySettings::new(args.api_url.clone()))
        .context("could not build the backend client")?;
    match gateway.health().await {
        Ok(health) => polyglot_info!(
            "Backend {} reports {} at {}",
            args.api_url,
            health.status,
            health.timestamp
        ),
        Err(err) => {
            polyglot_warn!("Backend health check failed: {}", err);
            eprintln!("Warning: backend at {} is not answering: {}", args.api_url, err);
        }
    }

    let initial = FileSnapshot::read(&args.file)
        .await
        .with_context(|| format!("could not read {}", args.file.display()))?;
    let mut session = Session::new(AppState::new(args.source), Arc::new(gateway));
    if let Some(targets) = args.target_override() {
        session.step(Msg::TargetsOverridden(Some(targets)));
    }

    let mut debouncer =
        Debouncer::with_initial(initial.text.clone(), DEBOUNCE_WINDOW, Instant::now());
    let mut last_seen = initial;
    let mut ticker = tokio::time::interval(Duration::from_millis(args.poll_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let settle_at = debouncer.deadline();
        tokio::select! {
            _ = ticker.tick() => match FileSnapshot::read(&args.file).await {
                Ok(current) => {
                    match current.change_since(&last_seen) {
                        FileChange::Edited => debouncer.push(current.text.clone(), Instant::now()),
                        // An edit still settling will dispatch anyway.
                        FileChange::Touched if !debouncer.is_pending() => {
                            polyglot_info!("{} saved without edits, retrying", args.file.display());
                            session.step(Msg::RetryRequested);
                        }
                        FileChange::Touched | FileChange::Unchanged => {}
                    }
                    last_seen = current;
                }
                Err(err) => polyglot_debug!("Could not read {}: {}", args.file.display(), err),
            },
            _ = sleep_until(settle_at) => {
                if let Some(code) = debouncer.poll(Instant::now()) {
                    session.step(Msg::CodeSettled(code));
                }
            }
            Some(msg) = session.runner.next_msg() => session.step(msg),
            _ = &mut shutdown => break,
        }
    }

    polyglot_info!("Stopped watching {}", args.file.display());
    Ok(())
}

struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn new(state: AppState, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            state,
            runner: EffectRunner::new(gateway),
        }
    }

    fn step(&mut self, msg: Msg) {
        let completed = match &msg {
            Msg::JobDone { seq, .. } => Some(*seq),
            _ => None,
        };
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        if state.consume_dirty() {
            println!("{}\n", render(&state.view()));
        } else if let Some(seq) = completed {
            polyglot_debug!("Discarded superseded outcome seq={}", seq);
        }
        self.state = state;
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}
