use super::repository::Order;

/// What the order subscriptions listen to.
#[derive(Clone, Debug)]
pub enum OrderEvent {
    Pending { order: Order, owner_id: String },
    Cooked { order: Order },
    Updated { order: Order, owner_id: Option<String> },
}

/// Orders waiting in the kitchen of the owner's restaurants.
pub fn pending_for(event: OrderEvent, owner_id: &str) -> Option<Order> {
    match event {
        OrderEvent::Pending {
            order,
            owner_id: restaurant_owner_id,
        } if restaurant_owner_id == owner_id => Some(order),
        _ => None,
    }
}

pub fn cooked(event: OrderEvent) -> Option<Order> {
    match event {
        OrderEvent::Cooked { order } => Some(order),
        _ => None,
    }
}

/// Updates of one order, for its customer, its driver or its restaurant's owner.
pub fn update_for(event: OrderEvent, order_id: &str, user_id: &str) -> Option<Order> {
    let OrderEvent::Updated { order, owner_id } = event else {
        return None;
    };

    let involved = order.customer_id.as_deref() == Some(user_id)
        || order.driver_id.as_deref() == Some(user_id)
        || owner_id.as_deref() == Some(user_id);

    (order.id == order_id && involved).then_some(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modules::order::repository::OrderStatus, utils::money::Money};
    use chrono::Utc;

    fn order(id: &str) -> Order {
        Order {
            id: String::from(id),
            customer_id: Some(String::from("client")),
            driver_id: None,
            restaurant_id: Some(String::from("restaurant")),
            total: Money::from(12),
            status: OrderStatus::Pending,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn pending_orders_reach_the_restaurant_owner_only() {
        let event = OrderEvent::Pending {
            order: order("1"),
            owner_id: String::from("owner"),
        };
        assert!(pending_for(event.clone(), "owner").is_some());
        assert!(pending_for(event, "someone-else").is_none());
        assert!(pending_for(OrderEvent::Cooked { order: order("1") }, "owner").is_none());
    }

    #[test]
    fn cooked_orders_reach_every_driver() {
        assert!(cooked(OrderEvent::Cooked { order: order("1") }).is_some());
        let pending = OrderEvent::Pending {
            order: order("1"),
            owner_id: String::from("owner"),
        };
        assert!(cooked(pending).is_none());
    }

    #[test]
    fn updates_are_filtered_by_order_and_involvement() {
        let event = OrderEvent::Updated {
            order: order("1"),
            owner_id: Some(String::from("owner")),
        };
        assert!(update_for(event.clone(), "1", "client").is_some());
        assert!(update_for(event.clone(), "1", "owner").is_some());
        assert!(update_for(event.clone(), "1", "stranger").is_none());
        assert!(update_for(event, "2", "client").is_none());
    }
}
