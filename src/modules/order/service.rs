use super::repository::{Order, OrderItemOption, OrderStatus};
use crate::{
    modules::{
        restaurant::repository::{restaurant, Dish},
        user::repository::{Role, User},
    },
    types::Context,
    utils::money::Money,
};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Price of one dish with the customer's options applied.
///
/// An option with a non-zero `extra` adds that extra; otherwise the extra of
/// the picked choice is added. Unknown options and choices add nothing.
pub fn calculate_item_price(dish: &Dish, options: &[OrderItemOption]) -> Money {
    let mut price = dish.price.clone();

    for picked in options {
        let Some(option) = dish.options.iter().find(|option| option.name == picked.name) else {
            continue;
        };

        match &option.extra {
            Some(extra) if !extra.is_zero() => price += extra,
            _ => {
                let extra = option
                    .choices
                    .iter()
                    .flatten()
                    .find(|choice| Some(&choice.name) == picked.choice.as_ref())
                    .and_then(|choice| choice.extra.as_ref());
                if let Some(extra) = extra {
                    price += extra;
                }
            }
        }
    }

    price
}

/// Whether `user` takes part in the order in the capacity of their role.
pub fn can_see(user: &User, order: &Order, restaurant_owner_id: Option<&str>) -> bool {
    match user.role {
        Role::Client => order.customer_id.as_deref() == Some(user.id.as_str()),
        Role::Delivery => order.driver_id.as_deref() == Some(user.id.as_str()),
        Role::Owner => restaurant_owner_id == Some(user.id.as_str()),
    }
}

/// Owner of the order's restaurant, if the restaurant still exists.
pub async fn find_restaurant_owner_id(
    ctx: Arc<Context>,
    order: &Order,
) -> Result<Option<String>, Error> {
    let Some(restaurant_id) = order.restaurant_id.clone() else {
        return Ok(None);
    };

    restaurant::find_by_id(&ctx.db_conn.pool, restaurant_id)
        .await
        .map(|restaurant| restaurant.map(|restaurant| restaurant.owner_id))
        .map_err(|_| Error::UnexpectedError)
}

pub fn can_set_status(role: Role, status: OrderStatus) -> bool {
    match role {
        Role::Client => false,
        Role::Owner => matches!(status, OrderStatus::Cooking | OrderStatus::Cooked),
        Role::Delivery => matches!(status, OrderStatus::PickedUp | OrderStatus::Delivered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::restaurant::repository::{DishChoice, DishOption};
    use chrono::Utc;
    use sqlx::types::Json;

    fn money(amount: &str) -> Money {
        amount.parse().unwrap()
    }

    fn pizza() -> Dish {
        Dish {
            id: String::from("01HZDISH"),
            name: String::from("Pizza"),
            price: money("10"),
            photo: None,
            description: String::from("Cheesy"),
            options: Json(vec![
                DishOption {
                    name: String::from("Spice Level"),
                    choices: Some(vec![
                        DishChoice {
                            name: String::from("Little"),
                            extra: None,
                        },
                        DishChoice {
                            name: String::from("Kill me"),
                            extra: Some(money("2.5")),
                        },
                    ]),
                    extra: None,
                },
                DishOption {
                    name: String::from("Pickle"),
                    choices: None,
                    extra: Some(money("1")),
                },
                DishOption {
                    name: String::from("Size"),
                    choices: Some(vec![DishChoice {
                        name: String::from("XL"),
                        extra: Some(money("4")),
                    }]),
                    extra: Some(Money::zero()),
                },
            ]),
            restaurant_id: String::from("01HZRESTAURANT"),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    fn pick(name: &str, choice: Option<&str>) -> OrderItemOption {
        OrderItemOption {
            name: String::from(name),
            choice: choice.map(String::from),
        }
    }

    #[test]
    fn plain_dish_costs_its_price() {
        assert_eq!(calculate_item_price(&pizza(), &[]), money("10"));
    }

    #[test]
    fn option_extra_is_added() {
        assert_eq!(
            calculate_item_price(&pizza(), &[pick("Pickle", None)]),
            money("11")
        );
    }

    #[test]
    fn choice_extra_is_added() {
        let options = [pick("Spice Level", Some("Kill me")), pick("Pickle", None)];
        assert_eq!(calculate_item_price(&pizza(), &options), money("13.5"));
    }

    #[test]
    fn zero_option_extra_falls_back_to_choices() {
        assert_eq!(
            calculate_item_price(&pizza(), &[pick("Size", Some("XL"))]),
            money("14")
        );
    }

    #[test]
    fn unknown_options_and_choices_add_nothing() {
        let options = [
            pick("Sauce", Some("BBQ")),
            pick("Spice Level", Some("Lava")),
            pick("Spice Level", Some("Little")),
        ];
        assert_eq!(calculate_item_price(&pizza(), &options), money("10"));
    }

    fn user(id: &str, role: Role) -> User {
        User {
            id: String::from(id),
            email: format!("{}@test.com", id),
            role,
            verified: true,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    fn order() -> Order {
        Order {
            id: String::from("01HZORDER"),
            customer_id: Some(String::from("client")),
            driver_id: Some(String::from("driver")),
            restaurant_id: Some(String::from("01HZRESTAURANT")),
            total: money("10"),
            status: OrderStatus::Pending,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn only_involved_users_see_an_order() {
        let order = order();
        assert!(can_see(&user("client", Role::Client), &order, Some("owner")));
        assert!(can_see(&user("driver", Role::Delivery), &order, Some("owner")));
        assert!(can_see(&user("owner", Role::Owner), &order, Some("owner")));

        assert!(!can_see(&user("other", Role::Client), &order, Some("owner")));
        assert!(!can_see(&user("other", Role::Delivery), &order, Some("owner")));
        assert!(!can_see(&user("other", Role::Owner), &order, Some("owner")));
        assert!(!can_see(&user("owner", Role::Owner), &order, None));
    }

    #[test]
    fn roles_move_orders_through_their_own_statuses() {
        use OrderStatus::*;

        for status in [Pending, Cooking, Cooked, PickedUp, Delivered] {
            assert!(!can_set_status(Role::Client, status));
        }

        assert!(can_set_status(Role::Owner, Cooking));
        assert!(can_set_status(Role::Owner, Cooked));
        assert!(!can_set_status(Role::Owner, PickedUp));
        assert!(!can_set_status(Role::Owner, Pending));

        assert!(can_set_status(Role::Delivery, PickedUp));
        assert!(can_set_status(Role::Delivery, Delivered));
        assert!(!can_set_status(Role::Delivery, Cooked));
    }
}
