//! Plain-text status blocks.
//!
//! Every function returns newline-terminated lines so callers can print the
//! result as is.  Ids are printed as bare numbers.

use wh_core::{CustomerId, OrderId, VolunteerId};
use wh_model::Order;
use wh_sim::{SimResult, Warehouse};

/// `OrderId`, `OrderStatus`, `CustomerID`, `Collector`, `Driver`.
///
/// Unassigned volunteers print as `None`.
pub fn order_status(warehouse: &Warehouse, id: OrderId) -> SimResult<String> {
    let order = warehouse.order(id)?;
    Ok(format!(
        "OrderId: {}\nOrderStatus: {}\nCustomerID: {}\nCollector: {}\nDriver: {}\n",
        order.id().0,
        order.status(),
        order.customer_id().0,
        or_none(order.collector().map(|v| v.0)),
        or_none(order.driver().map(|v| v.0)),
    ))
}

/// `CustomerID`, then `OrderID`/`OrderStatus` per placed order, then
/// `numOrdersLeft`.
pub fn customer_status(warehouse: &Warehouse, id: CustomerId) -> SimResult<String> {
    let customer = warehouse.customer(id)?;
    let mut out = format!("CustomerID: {}\n", customer.id.0);
    for &order_id in customer.order_ids() {
        // Orders never leave the warehouse.
        let order = warehouse.order(order_id)?;
        out.push_str(&format!("OrderID: {}\nOrderStatus: {}\n", order.id().0, order.status()));
    }
    out.push_str(&format!("numOrdersLeft: {}\n", customer.orders_left()));
    Ok(out)
}

/// `VolunteerID`, `isBusy`, `OrderID`, `TimeLeft`, `OrdersLeft`.
///
/// `TimeLeft` is ticks for collectors and distance for drivers; `None` when
/// idle.  Unlimited volunteers print `OrdersLeft: No limit`.
pub fn volunteer_status(warehouse: &Warehouse, id: VolunteerId) -> SimResult<String> {
    let volunteer = warehouse.volunteer(id)?;
    let orders_left = volunteer
        .orders_left()
        .map_or_else(|| "No limit".to_owned(), |left| left.to_string());
    Ok(format!(
        "VolunteerID: {}\nisBusy: {}\nOrderID: {}\nTimeLeft: {}\nOrdersLeft: {}\n",
        volunteer.id.0,
        if volunteer.is_busy() { "True" } else { "False" },
        or_none(volunteer.active_order().map(|o| o.0)),
        or_none(volunteer.time_left()),
        orders_left,
    ))
}

/// One line per order: pending, then in-process, then completed.
pub fn close_summary(warehouse: &Warehouse) -> String {
    warehouse.all_orders().map(summary_line).collect()
}

fn summary_line(order: &Order) -> String {
    format!(
        "OrderID: {} , CustomerID: {} , Status: {}\n",
        order.id().0,
        order.customer_id().0,
        order.status()
    )
}

fn or_none(value: Option<u32>) -> String {
    value.map_or_else(|| "None".to_owned(), |v| v.to_string())
}
