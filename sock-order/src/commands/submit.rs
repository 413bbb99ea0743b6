use anyhow::{Context, Result, bail};
use clap::Args;
use shared::SizeCode;
use sock_client::OrderSession;

#[derive(Args, Debug)]
#[command(about = "Build an order and post it to the webhook")]
pub struct SubmitArgs {
    /// Park id (defaults to the first park in the catalog)
    #[arg(short, long)]
    pub park: Option<String>,

    /// Cases for a style and size, e.g. `bliss:M=2` (repeatable)
    #[arg(short = 'q', long = "qty", value_name = "STYLE:SIZE=CASES", value_parser = parse_quantity)]
    pub quantities: Vec<QuantityArg>,

    /// Free-text notes for the order
    #[arg(short, long, default_value = "")]
    pub notes: String,

    /// Print the payload without posting it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityArg {
    pub style_id: String,
    pub size: SizeCode,
    pub cases: i64,
}

fn parse_quantity(raw: &str) -> Result<QuantityArg, String> {
    let (key, cases) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected STYLE:SIZE=CASES, got `{raw}`"))?;
    let (style_id, size) = key
        .split_once(':')
        .ok_or_else(|| format!("expected STYLE:SIZE before `=`, got `{key}`"))?;
    if style_id.trim().is_empty() || size.trim().is_empty() {
        return Err(format!("style and size must not be empty in `{raw}`"));
    }
    let cases = cases
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("cases must be a whole number in `{raw}`"))?;
    Ok(QuantityArg {
        style_id: style_id.trim().to_string(),
        size: SizeCode::parse(size.trim()),
        cases,
    })
}

pub async fn execute(args: SubmitArgs) -> Result<()> {
    let (config, client, data) = super::load_form().await?;
    let mut session = OrderSession::new(data);

    if let Some(park) = args.park {
        session.select_park(park);
    }
    for qty in &args.quantities {
        session.set_quantity(&qty.style_id, &qty.size, qty.cases);
        if qty.cases > 0 && session.selection().quantity(&qty.style_id, &qty.size) == 0 {
            tracing::debug!(style = %qty.style_id, size = %qty.size, "Size is unavailable, skipped");
        }
    }
    session.set_notes(args.notes);

    let now = chrono::Utc::now();
    let preview = match session.preview(now) {
        Ok(payload) => payload,
        Err(e) => bail!("{} ({e})", e.user_message()),
    };
    println!("{}", serde_json::to_string_pretty(&preview)?);

    if args.dry_run {
        return Ok(());
    }

    let webhook = config.require_webhook().map_err(super::config_error)?;
    match session.submit(&client, webhook, now).await {
        Ok(payload) => {
            println!(
                "Order sent: {} lines, {} cases, {} pairs",
                payload.lines.len(),
                payload.total_cases(),
                payload.total_pairs()
            );
            Ok(())
        }
        Err(e) => Err(e).context("Submit failed. Your selections were kept."),
    }
}
