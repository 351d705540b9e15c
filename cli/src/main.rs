//! EuroStudy CLI - thin presentation adapter over the cost engine
//!
//! Parses one estimation request from flags, runs a single resolve/compute
//! pass, and renders the result. Every displayed amount goes through the
//! engine's `convert` contract; the audit log is rendered by entry kind,
//! never by message text.

use clap::Parser;

use eurostudy_core_rs::{
    canonical_digest, compute_metrics, constants::DEFAULT_COUNTRY, convert, resolve, AuditKind,
    CityTier, CostRecord, CourseLevel, DerivedMetrics, ReferenceStore, StudentOrigin, UserConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "eurostudy",
    version,
    about = "Estimate the cost of studying abroad"
)]
struct Cli {
    /// Destination country (unknown names fall back to the default profile)
    #[arg(long, default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Student origin: EU or Non-EU
    #[arg(long, default_value = "Non-EU")]
    origin: StudentOrigin,

    /// Course level: Undergraduate, Masters, PhD, Short-term, Language Course
    #[arg(long, default_value = "Undergraduate")]
    level: CourseLevel,

    /// Program duration in years (may be fractional)
    #[arg(long, default_value_t = 3.0)]
    duration: f64,

    /// City tier: Big City, Mid-sized, Small Town
    #[arg(long, default_value = "Mid-sized")]
    city_tier: CityTier,

    /// Display currency code
    #[arg(long, default_value = "EUR")]
    currency: String,

    /// Planned term-time work hours per week
    #[arg(long, default_value_t = 0)]
    work_hours: u32,

    /// Expected hourly wage in euros
    #[arg(long, default_value_t = 12.0)]
    wage: f64,

    /// Weeks of full-time holiday work (0..=18)
    #[arg(long, default_value_t = 0)]
    holiday_weeks: u32,

    /// Emit the full config/record/metrics document as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> UserConfig {
        UserConfig {
            country: self.country,
            student_origin: self.origin,
            course_level: self.level,
            duration_years: self.duration,
            city_tier: self.city_tier,
            target_currency: self.currency,
            work_hours_per_week: self.work_hours,
            hourly_wage: self.wage,
            holiday_work_weeks: self.holiday_weeks,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json_output = cli.json;
    let config = cli.into_config();

    if let Err(e) = config.validate() {
        eprintln!("invalid configuration: {e}");
        std::process::exit(2);
    }

    let store = ReferenceStore::builtin();
    let record = resolve(
        &store,
        &config.country,
        config.course_level,
        config.duration_years,
        config.student_origin,
    );
    let metrics = compute_metrics(&record, &config);

    if json_output {
        print_json(&config, &record, &metrics);
    } else {
        print_report(&store, &config, &record, &metrics);
    }
}

fn print_json(config: &UserConfig, record: &CostRecord, metrics: &DerivedMetrics) {
    let (record_digest, metrics_digest) =
        match (canonical_digest(record), canonical_digest(metrics)) {
            (Ok(r), Ok(m)) => (r, m),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("digest computation failed: {e}");
                std::process::exit(1);
            }
        };

    let document = serde_json::json!({
        "config": config,
        "record": record,
        "metrics": metrics,
        "record_digest": record_digest,
        "metrics_digest": metrics_digest,
    });
    match serde_json::to_string_pretty(&document) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("serialization failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_report(
    store: &ReferenceStore,
    config: &UserConfig,
    record: &CostRecord,
    metrics: &DerivedMetrics,
) {
    let symbol = store.currency_symbol(&config.target_currency);
    let money =
        |amount: f64| format!("{symbol}{}", convert(amount, &config.target_currency, &record.exchange_rates));

    println!(
        "{} — {} student, {}, {} years, {}",
        record.country_name,
        config.student_origin,
        config.course_level,
        config.duration_years,
        config.city_tier
    );
    println!("{}", record.description);
    println!();

    println!("Data verification & compliance");
    for entry in record.audit_log.entries() {
        match entry.kind {
            AuditKind::Info => println!("  [info] {}", entry.message),
            AuditKind::Warning => println!("  [warn] {}", entry.message),
        }
    }
    println!();

    println!("Summary");
    println!("  Mandatory liquidity (visa):   {}", money(metrics.mandatory_liquidity));
    println!("  Recommended liquidity:        {}", money(metrics.recommended_liquidity));
    if metrics.liquidity_gap > 0.0 {
        println!("  Liquidity gap:                {}", money(metrics.liquidity_gap));
    }
    println!("  Net degree cost (after work): {}", money(metrics.net_total_cost));
    println!("  Affordability:                {}", metrics.affordability_tier);
    if !config.plans_no_work() {
        println!(
            "  Living costs covered by work: {}%",
            metrics.living_cost_covered_percent
        );
    }
    println!();

    println!("Monthly living ({})", config.city_tier);
    println!("  Housing:        {}", money(metrics.monthly_breakdown.housing));
    println!("  Food:           {}", money(metrics.monthly_breakdown.food));
    println!("  Insurance:      {}", money(metrics.monthly_breakdown.insurance));
    println!(
        "  Transport+misc: {}",
        money(metrics.monthly_breakdown.transport + metrics.monthly_breakdown.misc)
    );
    println!("  Total:          {}/mo", money(metrics.monthly_living_cost));
    if metrics.monthly_avg_work_income > 0.0 {
        println!(
            "  Avg work income: -{}/mo => out of pocket {}/mo",
            money(metrics.monthly_avg_work_income),
            money(metrics.net_monthly_out_of_pocket)
        );
    }
    println!();

    println!("Cost timeline");
    println!("  Year 1:  start-up {} + tuition {} + living {} = {}",
        money(metrics.start_up_fees),
        money(record.tuition_yearly),
        money(metrics.yearly_living_cost),
        money(metrics.first_year_cost)
    );
    println!(
        "  Year 2+: tuition {} + living {} = {}/yr",
        money(record.tuition_yearly),
        money(metrics.yearly_living_cost),
        money(metrics.subsequent_year_cost)
    );
    println!("  Total degree cost: {}", money(metrics.total_degree_cost));
    println!();

    println!("Work feasibility");
    println!(
        "  Legal cap: {}h/week ({})",
        record.part_time_work.legal_max_hours, record.part_time_work.regulations
    );
    println!(
        "  Max potential coverage: {}% — {}",
        metrics.max_potential_coverage_percent,
        if metrics.is_work_feasible {
            "part-time work can realistically cover living costs"
        } else {
            "plan for supplemental savings"
        }
    );

    if let Some(official) = &record.official_data {
        println!();
        println!("Official sources");
        println!(
            "  Funding proof: {} — {} per year",
            official.funding_proof.preferred_method,
            money(official.funding_proof.amount_euro)
        );
        println!("  Visa fee: {}", money(official.visa_fee_euro));
        println!("  Verify at: {}", official.funding_proof.official_link);
    }
}
