use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use rl::{run_episode, AlternatePolicy, CartpoleSimulator, SimulatorConfig};
use tracing::info_span;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn episode_logs_go_through_the_supplied_span() -> anyhow::Result<()> {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || -> anyhow::Result<()> {
        let span = info_span!("trainer_sim", run = 7);
        let mut sim = CartpoleSimulator::new(SimulatorConfig::default(), Some(4))?.with_span(span);
        run_episode(&mut sim, &mut AlternatePolicy::default())?;
        Ok(())
    })?;

    let output = String::from_utf8(buf.0.lock().unwrap().clone())?;
    let start_line = output
        .lines()
        .find(|line| line.contains("Episode 1 Starting"))
        .unwrap_or_else(|| panic!("no episode start line in:\n{output}"));
    assert!(start_line.contains("trainer_sim{run=7}"), "line: {start_line}");
    assert!(!output.contains("CartpoleSimulator"), "default span leaked:\n{output}");
    Ok(())
}
