//! `wayfinder plan` — run a query through the structured pipeline and
//! render the tagged result.

use clap::Args;
use std::time::Duration;
use wayfinder_core::context::{BudgetLevel, UserContext};
use wayfinder_core::error::GatewayError;
use wayfinder_core::outcome::PipelineResult;
use wayfinder_pipeline::Pipeline;

#[derive(Args)]
pub struct PlanArgs {
    /// The travel query
    pub query: String,

    /// User id to attach to the session context
    #[arg(long)]
    pub user: Option<String>,

    /// Preferred airline (repeatable)
    #[arg(long = "airline")]
    pub airlines: Vec<String>,

    /// Required hotel amenity (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// Spending tier: budget, mid-range, or luxury
    #[arg(long, default_value = "mid-range")]
    pub budget_level: BudgetLevel,

    /// Run without any preference context
    #[arg(long)]
    pub no_context: bool,

    /// Emit the raw tagged JSON result instead of the pretty rendering
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;

    let registry = wayfinder_providers::build_from_config(&config);
    let gateway = registry
        .default()
        .ok_or_else(|| GatewayError::NotConfigured(config.default_provider.clone()))?;

    let pipeline = Pipeline::new(gateway, config.resolved_model())
        .with_temperature(config.default_temperature)
        .with_guardrail_temperature(config.guardrail_temperature)
        .with_max_tokens(config.default_max_tokens)
        .with_timeout(Duration::from_secs(config.request_timeout_secs));

    let context = if args.no_context {
        None
    } else {
        let mut ctx = match &args.user {
            Some(id) => UserContext::new(id),
            None => UserContext::anonymous(),
        };
        for airline in &args.airlines {
            ctx.prefer_airline(airline);
        }
        for amenity in &args.amenities {
            ctx.require_amenity(amenity);
        }
        ctx.set_budget_level(args.budget_level);
        Some(ctx)
    };

    let result = pipeline.handle(&args.query, context.as_ref()).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render(&result));
    }

    Ok(())
}

/// Render a pipeline result for a terminal.
fn render(result: &PipelineResult) -> String {
    let mut out = String::new();
    match result {
        PipelineResult::Flight(flight) => {
            out.push_str("✈️  FLIGHT RECOMMENDATION\n");
            out.push_str(&format!("  Airline:   {}\n", flight.airline));
            out.push_str(&format!("  Departure: {}\n", flight.departure_time));
            out.push_str(&format!("  Arrival:   {}\n", flight.arrival_time));
            out.push_str(&format!("  Price:     ${}\n", flight.price));
            out.push_str(&format!(
                "  Direct:    {}\n",
                if flight.direct_flight { "Yes" } else { "No" }
            ));
            out.push_str(&format!("  Why:       {}", flight.recommendation_reason));
        }
        PipelineResult::Hotel(hotel) => {
            out.push_str("🏨 HOTEL RECOMMENDATION\n");
            out.push_str(&format!("  Name:     {}\n", hotel.name));
            out.push_str(&format!("  Location: {}\n", hotel.location));
            out.push_str(&format!("  Per night: ${}\n", hotel.price_per_night));
            out.push_str("  Amenities:\n");
            for (i, amenity) in hotel.amenities.iter().enumerate() {
                out.push_str(&format!("    {}. {}\n", i + 1, amenity));
            }
            out.push_str(&format!("  Why:      {}", hotel.recommendation_reason));
        }
        PipelineResult::Plan(plan) => {
            out.push_str(&format!(
                "🌍 TRAVEL PLAN FOR {}\n",
                plan.destination.to_uppercase()
            ));
            out.push_str(&format!("  Duration: {} days\n", plan.duration_days));
            out.push_str(&format!("  Budget:   ${}\n", plan.budget));
            out.push_str("  Activities:\n");
            for (i, activity) in plan.activities.iter().enumerate() {
                out.push_str(&format!("    {}. {}\n", i + 1, activity));
            }
            out.push_str(&format!("  Notes:    {}", plan.notes));
        }
        PipelineResult::Guardrail {
            reasoning,
            suggested_budget,
        } => {
            out.push_str("⚠️  BUDGET CHECK\n");
            out.push_str(&format!("  {reasoning}"));
            if let Some(suggested) = suggested_budget {
                out.push_str(&format!("\n  Suggested budget: ${suggested}"));
            }
        }
        PipelineResult::Error { error, raw } => {
            out.push_str("❌ Could not produce a structured response\n");
            out.push_str(&format!("  {error}"));
            if !raw.is_empty() {
                out.push_str(&format!("\n\n  Raw output:\n  {raw}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::schema::{FlightRecommendation, TravelPlan};

    #[test]
    fn renders_flight() {
        let result = PipelineResult::Flight(FlightRecommendation {
            airline: "Delta".into(),
            departure_time: "09:00".into(),
            arrival_time: "12:30".into(),
            price: 240.0,
            direct_flight: true,
            recommendation_reason: "cheapest direct option".into(),
        });
        let text = render(&result);
        assert!(text.contains("Delta"));
        assert!(text.contains("$240"));
        assert!(text.contains("Yes"));
    }

    #[test]
    fn renders_plan_with_numbered_activities() {
        let result = PipelineResult::Plan(TravelPlan {
            destination: "Miami".into(),
            duration_days: 5,
            budget: 2000.0,
            activities: vec!["beach".into(), "art deco tour".into()],
            notes: "pack sunscreen".into(),
        });
        let text = render(&result);
        assert!(text.contains("MIAMI"));
        assert!(text.contains("1. beach"));
        assert!(text.contains("2. art deco tour"));
    }

    #[test]
    fn renders_guardrail_with_suggestion() {
        let result = PipelineResult::Guardrail {
            reasoning: "budget too low".into(),
            suggested_budget: Some(1500.0),
        };
        let text = render(&result);
        assert!(text.contains("budget too low"));
        assert!(text.contains("$1500"));
    }

    #[test]
    fn renders_error_with_raw_output() {
        let result = PipelineResult::Error {
            error: "invalid JSON".into(),
            raw: "gibberish".into(),
        };
        let text = render(&result);
        assert!(text.contains("invalid JSON"));
        assert!(text.contains("gibberish"));
    }

    #[test]
    fn error_without_raw_omits_section() {
        let result = PipelineResult::Error {
            error: "timed out".into(),
            raw: String::new(),
        };
        assert!(!render(&result).contains("Raw output"));
    }
}
