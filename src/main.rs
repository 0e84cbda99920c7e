use std::sync::Arc;

use propvista::compare::{compare, CompareSelection, Comparison};
use propvista::models::{AppointmentType, NewAppointment, PropertyStatus};
use propvista::query::{FilterCriteria, PropertySource, QueryRunner};
use propvista::session::Session;
use propvista::store::RecordStore;
use tracing::{info, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 PropVista - property listing demo");
    info!("====================================");
    info!("");

    let store = Arc::new(RecordStore::new());
    let runner = QueryRunner::new(Arc::clone(&store) as Arc<dyn PropertySource>);

    // Open listing: every approved property, premium first, newest first
    let criteria = FilterCriteria::any().with_status(PropertyStatus::Approved);
    if let Some(properties) = runner.run(&criteria).await {
        info!("✅ {} approved listings\n", properties.len());
        for (i, property) in properties.iter().enumerate() {
            let tier = if property.is_premium { " [premium]" } else { "" };
            println!(
                "{}. {}{} ({})",
                i + 1,
                property.name,
                tier,
                format_price(property.price)
            );
            println!("   {}, {}", property.location.locality, property.location.city);
            println!(
                "   {:?} · {} sq.ft · {} bed / {} bath",
                property.config, property.area, property.bedrooms, property.bathrooms
            );
            println!("   Amenities: {}", property.amenities.join(", "));
            println!();
        }
    }

    // Filtered listing: Mumbai under 2.5 Cr
    let criteria = FilterCriteria::any()
        .with_city("Mumbai")
        .with_budget(None, Some(25_000_000))
        .with_status(PropertyStatus::Approved);
    if let Some(properties) = runner.run(&criteria).await {
        info!("🔎 Mumbai under ₹2.50 Cr: {} match(es)", properties.len());
        for property in &properties {
            println!("   - {} ({})", property.name, format_price(property.price));
        }
        println!();
    }

    // Side-by-side comparison of three seeded listings
    let mut selection = CompareSelection::new();
    selection.add("prop-001");
    selection.add("prop-003");
    selection.add("prop-005");

    let comparison = compare(&store, &selection).await?;
    info!("⚖️  Comparing {} properties", comparison.properties.len());
    for property in &comparison.properties {
        let best = if comparison.is_best_value(property) {
            "  << best value"
        } else {
            ""
        };
        println!("   {} - {}{}", property.name, format_price(property.price), best);
    }
    println!("   Amenity rows:");
    for amenity in &comparison.amenity_rows {
        let cells: Vec<&str> = comparison
            .properties
            .iter()
            .map(|p| if Comparison::has_amenity(p, amenity) { "yes" } else { "-" })
            .collect();
        println!("     {:<16} {}", amenity, cells.join(" / "));
    }
    println!();

    // Session: sign in the seeded buyer, favorite a listing, book a visit
    let session_dir = std::env::temp_dir();
    let mut session = Session::load(&session_dir).await;
    let user = session.login(&store, "buyer@test.com").await?;
    info!("👤 Signed in as {} ({:?})", user.name, user.role);

    let favorites = session.toggle_favorite(&store, "prop-002").await?;
    info!("❤️  Favorites now: {}", favorites.join(", "));

    let appointment = store
        .schedule_appointment(NewAppointment {
            property_id: "prop-002".to_string(),
            property_name: "Green Meadows".to_string(),
            buyer_id: user.id.clone(),
            buyer_name: user.name.clone(),
            buyer_email: user.email.clone(),
            seller_id: "user-002".to_string(),
            seller_name: "Prestige Builders".to_string(),
            kind: AppointmentType::SiteVisit,
            date: "2025-08-30".to_string(),
            time: "11:00".to_string(),
            notes: None,
        })
        .await;
    info!(
        "📅 Booked {:?} for {} on {} at {}",
        appointment.kind, appointment.property_name, appointment.date, appointment.time
    );

    let upcoming = store.appointments_by_buyer(&user.id).await;
    info!("   {} appointment(s) on file for {}", upcoming.len(), user.name);

    session.logout().await?;

    Ok(())
}

/// Indian-style price formatting (lakhs and crores)
fn format_price(price: i64) -> String {
    if price >= 10_000_000 {
        format!("₹{:.2} Cr", price as f64 / 10_000_000.0)
    } else if price >= 100_000 {
        format!("₹{:.2} L", price as f64 / 100_000.0)
    } else {
        format!("₹{}", price)
    }
}
