use std::io::{self, Write};

use eyre::{Result, WrapErr};

use moodly_assessment::eligibility::{check_eligibility, evaluate};
use moodly_assessment::review::{authorize_retake, resume};
use moodly_assessment::window::format_remaining;
use moodly_assessment::{AssessmentFlow, FlowError, FlowState, RetakeError, SystemClock};
use moodly_cli::config::{self, MoodlyConfig};
use moodly_cli::session_from_env;
use moodly_core::helplines::HELPLINES;
use moodly_core::models::assessment::AssessmentResult;
use moodly_core::models::eligibility::EligibilityVerdict;
use moodly_core::models::response::Rating;
use moodly_core::session::Session;
use moodly_instruments::Instrument;
use moodly_instruments::instruments::dass21::DASS21;
use moodly_instruments::scoring::Item;
use moodly_store::{HttpResultStore, ResultStore, StoreError};

struct Context {
    session: Session,
    store: HttpResultStore,
}

fn effective_config() -> Result<MoodlyConfig> {
    let mut config = config::load_config()?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn context() -> Result<Context> {
    let config = effective_config()?;
    let session = session_from_env(|key| std::env::var(key).ok())?;
    let store = HttpResultStore::new(&config.store_settings());
    Ok(Context { session, store })
}

fn store_failure(err: StoreError) -> eyre::Report {
    if err.is_auth() {
        return eyre::eyre!("your session has expired, please sign in again");
    }
    eyre::Report::new(err)
}

fn flow_failure(err: FlowError) -> eyre::Report {
    match err {
        FlowError::Store(e) => store_failure(e),
        other => eyre::Report::new(other),
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(eyre::eyre!("input closed before the questionnaire was finished"));
    }
    Ok(line.trim().to_string())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;
    Ok(matches!(read_line()?.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn prompt_rating(item: &Item) -> Result<i64> {
    loop {
        print!("Q{}. {} [0-3]: ", item.index + 1, item.text);
        io::stdout().flush()?;
        match read_line()?.parse::<i64>() {
            Ok(value) if Rating::new(value).is_ok() => return Ok(value),
            _ => println!("Please enter a number from 0 to 3."),
        }
    }
}

fn print_result(result: &AssessmentResult) {
    println!("{}", DASS21.to_structured_input(result));
}

fn print_verdict(verdict: &EligibilityVerdict) {
    println!("{}", verdict.guidance());
    if !verdict.eligible() {
        println!();
        print_helplines();
    }
}

pub fn print_helplines() {
    println!("If you need to talk to someone now:");
    for helpline in HELPLINES {
        let mut line = format!("  {}: {}", helpline.name, helpline.phones.join(", "));
        if let Some(email) = helpline.email {
            line.push_str(&format!(" ({email})"));
        }
        println!("{line}");
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn print_cooldown(seconds: u64) {
    println!(
        "You have already taken the questionnaire recently. You can take it again in {}.",
        format_remaining(seconds)
    );
}

pub async fn take() -> Result<()> {
    let ctx = context()?;
    let clock = SystemClock;
    let mut flow = AssessmentFlow::new(&ctx.store, &ctx.session, &clock);
    flow.enter().await.map_err(flow_failure)?;

    let mut shown_scale = false;
    loop {
        match flow.state() {
            FlowState::Complete(result) => {
                print_result(result);
                print_verdict(&evaluate(Some(result)));
                return Ok(());
            }
            FlowState::CooldownBlocked {
                time_remaining_seconds,
            } => {
                print_cooldown(*time_remaining_seconds);
                return Ok(());
            }
            FlowState::QuestionPage(page) => {
                let page = *page;
                if !shown_scale {
                    println!("Over the past week, how much did each statement apply to you?");
                    for option in DASS21.scale() {
                        println!("  {} = {}", option.value, option.description);
                    }
                    shown_scale = true;
                }
                println!("\nPage {} of {}", page + 1, flow.page_count());
                for item in flow.current_items() {
                    let value = prompt_rating(item)?;
                    flow.answer(item.index, value)?;
                }
                if flow.is_last_page() {
                    submit_with_retry(&mut flow).await?;
                } else {
                    flow.next()?;
                }
            }
            other => return Err(eyre::eyre!("questionnaire stopped while {}", other.name())),
        }
    }
}

async fn submit_with_retry(flow: &mut AssessmentFlow<'_>) -> Result<()> {
    loop {
        let err = match flow.submit().await {
            Ok(_) => return Ok(()),
            Err(e) => e,
        };
        if let FlowError::Validation { missing } = &err {
            let questions: Vec<String> = missing.iter().map(|i| format!("Q{}", i + 1)).collect();
            return Err(eyre::eyre!("unanswered: {}", questions.join(", ")));
        }
        if err.is_retryable()
            && confirm(&format!("Could not save your answers ({err}). Try again?"))?
        {
            continue;
        }
        return Err(flow_failure(err));
    }
}

pub async fn status() -> Result<()> {
    let Context { session, store } = context()?;
    let status = store.status(&session).await.map_err(store_failure)?;

    println!("Result on file: {}", yes_no(status.has_valid_result));
    if let Some(result) = &status.result {
        println!("Submitted: {}", result.submitted_at);
    }
    if status.can_attempt {
        println!("You can take the questionnaire now.");
    } else {
        print_cooldown(status.time_remaining.unwrap_or(0));
    }
    Ok(())
}

pub async fn result() -> Result<()> {
    let ctx = context()?;
    match resume(&ctx.store, &ctx.session, None)
        .await
        .map_err(store_failure)?
    {
        Some(result) => {
            print_result(&result);
            print_verdict(&evaluate(Some(&result)));
        }
        None => println!("No result on file. Run `moodly take` to take the questionnaire."),
    }
    Ok(())
}

pub async fn eligibility() -> Result<()> {
    let ctx = context()?;
    let verdict = check_eligibility(&ctx.store, &ctx.session)
        .await
        .map_err(store_failure)?;
    print_verdict(&verdict);
    if verdict.suggests_questionnaire() {
        println!("Run `moodly take` to take the questionnaire.");
    }
    Ok(())
}

pub async fn retake() -> Result<()> {
    let ctx = context()?;
    let Some(result) = resume(&ctx.store, &ctx.session, None)
        .await
        .map_err(store_failure)?
    else {
        println!("No result on file. Run `moodly take` to take the questionnaire.");
        return Ok(());
    };

    match authorize_retake(&ctx.store, &ctx.session, &result, &SystemClock).await {
        Ok(()) => {
            println!("Your previous result was cleared. Run `moodly take` to start again.");
            Ok(())
        }
        Err(RetakeError::CooldownActive { remaining_seconds }) => {
            print_cooldown(remaining_seconds);
            Ok(())
        }
        Err(RetakeError::Store(e)) => Err(store_failure(e)),
    }
}

pub fn config_show() -> Result<()> {
    let config = effective_config()?;
    let path = config::config_path()?;
    if !config::has_config() {
        println!("# no config at {}, showing defaults", path.display());
    } else {
        println!("# {}", path.display());
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn config_init(
    api_base_url: Option<String>,
    timeout_secs: Option<u64>,
    force: bool,
) -> Result<()> {
    if config::has_config() && !force {
        let path = config::config_path()?;
        return Err(eyre::eyre!(
            "config already exists at {}; pass --force to overwrite",
            path.display()
        ));
    }

    let mut config = match api_base_url {
        Some(url) => MoodlyConfig::new(url),
        None => MoodlyConfig::default(),
    };
    if let Some(secs) = timeout_secs {
        config.request_timeout_secs = secs;
    }
    let path = config::save_config(&config).wrap_err("failed to write config")?;
    println!("Wrote {}", path.display());
    Ok(())
}
