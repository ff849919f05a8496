// Example demonstrating the multilog facility
//
// Run with: cargo run --example logging_demo

use multilog::{Component, LogConfig, Logger, Severity};

fn main() -> multilog::Result<()> {
    println!("=== multilog demo ===\n");

    multilog::initialize()?;

    // A logger owns one or more logs; its default severity is the baseline
    // threshold for every log it creates.
    let logger = Logger::new(Severity::Info)?;

    // A console log installed as the process-global fallback.
    let console = logger.create_log(&LogConfig::console())?;
    multilog::set_global_log(Some(console.clone()));

    println!("1. Thread-routed logging (no handle at the call site):");
    multilog::log_info!("facility up, {} log(s) owned", logger.log_count());
    multilog::log_warning!("suspicious but recoverable condition");
    multilog::log_debug!("below the Info threshold: not printed");

    println!("\n2. Per-component filtering:");
    console.level_set(Component::Probe, Severity::Debug);
    multilog::log_thread_component!(Severity::Debug, Component::Probe, "probe detail now visible");
    console.component_enable(Component::Probe, false);
    multilog::log_thread_component!(Severity::Error, Component::Probe, "suppressed entirely");
    console.component_enable(Component::Probe, true);

    println!("\n3. Multiline messages stay atomic:");
    let mut session = multilog::multiline_begin!(Severity::Info);
    session.append(format_args!("endpoint table:"));
    session.append(format_args!("  rx-video-0 connected"));
    session.append(format_args!("  tx-audio-1 probing"));
    session.end();

    println!("\n4. Sampled logging on a hot path:");
    for i in 0..10 {
        multilog::log_thread_when!(Severity::Warning, true, 4, "queue depth spike ({i})");
    }

    println!("\n5. A per-connection file log:");
    let dir = std::env::temp_dir();
    let path = dir.join("multilog_demo.log");
    let file_log = logger.create_file_log(Some(&path))?;
    multilog::log_handle!(file_log, Severity::Info, "written to {}", path.display());
    logger.destroy_log(&file_log);
    println!("   wrote and flushed {}", path.display());

    multilog::set_global_log(None);
    multilog::shutdown(false);
    Ok(())
}
