use anyhow::Context;
use bottle::utils::{logger, validation::Validate};
use bottle::{BottleError, CliConfig, ScenarioConfig, Session};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let scenario = match &config.config {
        Some(path) => match ScenarioConfig::from_file(path).and_then(|s| s.validate().map(|_| s)) {
            Ok(scenario) => Some(scenario),
            Err(e) => fail(&e),
        },
        None => None,
    };

    // 命令列旗標優先於場景檔案
    let verbose = config.verbose || scenario.as_ref().is_some_and(|s| s.verbose());
    let json = config.json || scenario.as_ref().is_some_and(|s| s.json_logs());
    if json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let plan = match config.build_plan(scenario.as_ref()) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("❌ {}", e);
            fail(&e)
        }
    };

    tracing::info!(
        capacity = plan.bottle.capacity(),
        level = plan.bottle.current_level(),
        steps = plan.steps.len(),
        locale = plan.locale.code(),
        "Starting bottle session"
    );

    let mut session = Session::new(plan.bottle);
    for step in plan.steps {
        let outcome = session.apply(step);
        if plan.show_steps {
            let marker = if outcome.clamped { " (clamped)" } else { "" };
            println!(
                "{}{} -> {}",
                outcome.step,
                marker,
                session.bottle().describe_in(plan.locale)
            );
        }
    }

    tracing::info!(clamped = session.clamp_count(), "Session finished");
    println!("{}", session.bottle().describe_in(plan.locale));

    std::io::Write::flush(&mut std::io::stdout()).context("failed to flush stdout")?;
    Ok(())
}

// May run before the logger is installed, so it writes to stderr directly.
fn fail(e: &BottleError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
