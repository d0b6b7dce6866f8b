use anyhow::Context;

use pancakelab_service::{PancakeService, ServiceConfig};

/// Walk one order from creation to delivery and print its final view.
fn main() -> anyhow::Result<()> {
    pancakelab_observability::init();

    let config = ServiceConfig::from_env();
    let service = PancakeService::in_memory();

    let order = service
        .create_order(config.building, config.room)
        .context("failed to create order")?;
    let order_id = order.id_typed();
    tracing::info!(%order_id, address = %order.address(), "demo order created");

    let labels: Vec<String> = service.menu().labels().into_iter().map(str::to_string).collect();
    for (idx, label) in labels.iter().enumerate() {
        service
            .add_pancakes(order_id, label, idx as i64 + 1)
            .with_context(|| format!("failed to add '{label}'"))?;
    }
    if let Some(first) = labels.first() {
        service.remove_pancakes(order_id, first, 1)?;
    }

    service.complete_order(order_id)?;
    service.prepare_order(order_id)?;
    service.deliver_order(order_id)?;
    let view = order.view()?;
    tracing::info!(%order_id, state = %view.state, "demo order delivered");

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
