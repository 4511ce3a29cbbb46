use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tempfile::tempdir;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

use dirculese::{apply_rule, Location, Rule, RuleKind};

/// Appends everything written into a shared in-memory buffer.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(filter: &str, f: F) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new(filter)).with(layer);

    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);

    let guard = buf.lock().unwrap();
    String::from_utf8_lossy(&guard[..]).to_string()
}

#[test]
fn move_and_rename_are_logged_at_info() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("x.png"), "new").unwrap();
    fs::write(dst.path().join("x.png"), "old").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Extension,
        vec!["png".into()],
    );
    let contents = capture("info", || {
        apply_rule(&rule).expect("apply rule");
    });

    assert!(contents.contains("Moved the file x.png"), "contents={contents}");
    assert!(contents.contains("renamed to x0.png"), "contents={contents}");
}

#[test]
fn quiet_filter_drops_routine_actions() {
    let src = tempdir().unwrap();
    fs::write(src.path().join("a.tmp"), "a").unwrap();

    let rule = Rule::deleting(Location::new(src.path()), RuleKind::Extension, vec!["tmp".into()]);
    let contents = capture("error", || {
        apply_rule(&rule).expect("apply rule");
    });

    assert!(!src.path().join("a.tmp").exists());
    assert!(!contents.contains("Deleted the file"), "contents={contents}");
}
