//! Integration tests for launch file resolution across modes and event timing.

use std::sync::Arc;
use std::thread;

use launch_core::{LatchState, LaunchConfig, LaunchContext, LaunchFileResolver};

fn argv(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_production_mac_never_reads_argv() {
    let samples = [
        argv(&[]),
        argv(&["/Applications/App"]),
        argv(&["/Applications/App", "/tmp/a.vvproj"]),
        argv(&["/Applications/App", "--", "/tmp/a.vvproj"]),
    ];
    for sample in samples {
        let resolver = LaunchFileResolver::new(LaunchContext::new(sample.clone(), true, true));
        assert_eq!(resolver.resolve_file_path(), None, "argv: {:?}", sample);
    }
}

#[test]
fn test_production_returns_second_argument() {
    let samples = [
        (argv(&[]), None),
        (argv(&["app.exe"]), None),
        (argv(&["app.exe", "C:\\song.vvproj"]), Some("C:\\song.vvproj")),
        (argv(&["app.exe", "--", "C:\\song.vvproj"]), Some("--")),
    ];
    for (sample, expected) in samples {
        let resolver = LaunchFileResolver::new(LaunchContext::new(sample.clone(), true, false));
        assert_eq!(
            resolver.resolve_file_path().as_deref(),
            expected,
            "argv: {:?}",
            sample
        );
    }
}

#[test]
fn test_development_returns_argument_after_separator() {
    let samples = [
        (argv(&[]), None),
        (argv(&["--"]), None),
        (argv(&["node", "main.js"]), None),
        (argv(&["node", "main.js", "--", "/tmp/song.vvproj"]), Some("/tmp/song.vvproj")),
        (argv(&["--", "--"]), Some("--")),
    ];
    for (sample, expected) in samples {
        let resolver = LaunchFileResolver::new(LaunchContext::new(sample.clone(), false, true));
        assert_eq!(
            resolver.resolve_file_path().as_deref(),
            expected,
            "argv: {:?}",
            sample
        );
    }
}

#[test]
fn test_notification_before_first_resolve_hides_argv() {
    let resolver = LaunchFileResolver::new(LaunchContext::new(
        argv(&["node", "main.js", "--", "/tmp/song.vvproj"]),
        false,
        false,
    ));
    resolver.notify_open_file_path("/tmp/opened.vvproj");

    assert_eq!(resolver.resolve_file_path().as_deref(), Some("/tmp/opened.vvproj"));
}

#[test]
fn test_notification_after_resolve_pins_result() {
    let resolver = LaunchFileResolver::new(LaunchContext::new(
        argv(&["app.exe", "C:\\song.vvproj"]),
        true,
        false,
    ));
    assert_eq!(resolver.resolve_file_path().as_deref(), Some("C:\\song.vvproj"));

    resolver.notify_open_file_path("X");
    for _ in 0..3 {
        assert_eq!(resolver.resolve_file_path().as_deref(), Some("X"));
    }

    resolver.notify_open_file_path("Y");
    assert_eq!(resolver.resolve_file_path().as_deref(), Some("Y"));
    assert_eq!(resolver.state(), LatchState::Notified);
}

#[test]
fn test_resolve_does_not_mutate_context() {
    let context = LaunchContext::new(argv(&["app.exe", "a.vvproj"]), true, false);
    let resolver = LaunchFileResolver::new(context.clone());
    resolver.resolve_file_path();
    resolver.notify_open_file_path("b.vvproj");
    resolver.resolve_file_path();

    assert_eq!(resolver.context(), &context);
}

#[test]
fn test_concurrent_notifications_settle_on_a_notified_path() {
    let resolver = Arc::new(LaunchFileResolver::new(LaunchContext::new(
        argv(&["app.exe", "from-argv"]),
        true,
        false,
    )));
    let notified: Vec<String> = (0..8).map(|i| format!("file-{i}.vvproj")).collect();

    let handles: Vec<_> = notified
        .iter()
        .cloned()
        .map(|path| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let seen = resolver.resolve_file_path();
                resolver.notify_open_file_path(path);
                seen
            })
        })
        .collect();

    for handle in handles {
        let seen = handle.join().expect("worker thread panicked");
        let seen = seen.expect("resolution is never absent here");
        assert!(seen == "from-argv" || notified.contains(&seen), "unexpected: {seen}");
    }

    let settled = resolver.resolve_file_path().expect("latched path");
    assert!(notified.contains(&settled));
}

#[test]
fn test_config_builds_matching_context() {
    let config = LaunchConfig {
        is_production: false,
        is_platform_mac: true,
    };
    let resolver = LaunchFileResolver::new(config.context(argv(&["electron", ".", "--", "a.vvproj"])));

    assert_eq!(resolver.resolve_file_path().as_deref(), Some("a.vvproj"));
}

#[test]
fn test_context_serializes_to_json() {
    let context = LaunchContext::new(argv(&["app.exe", "a.vvproj"]), true, false);
    let value = serde_json::to_value(&context).unwrap();

    assert_eq!(value["argv"][1], "a.vvproj");
    assert_eq!(value["is_production"], true);
    assert_eq!(value["is_platform_mac"], false);
}
