//! Unit tests for wh-model.

use wh_core::{CustomerId, OrderId, VolunteerId};

use crate::{Customer, CustomerKind, Order, OrderStatus, Quota, Role, RoleKind, Volunteer};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn order(id: u32, distance: u32) -> Order {
    Order::new(OrderId(id), CustomerId(0), distance)
}

#[cfg(test)]
mod orders {
    use super::*;

    #[test]
    fn new_order_is_pending_and_unassigned() {
        let o = order(3, 12);
        assert_eq!(o.status(), OrderStatus::Pending);
        assert_eq!(o.collector(), None);
        assert_eq!(o.driver(), None);
        assert_eq!(o.distance(), 12);
    }

    #[test]
    fn full_lifecycle_keeps_assignment_invariant() {
        let mut o = order(0, 5);
        o.assign_collector(VolunteerId(1));
        assert_eq!(o.status(), OrderStatus::Collecting);
        assert_eq!(o.collector(), Some(VolunteerId(1)));
        assert_eq!(o.driver(), None);

        o.assign_driver(VolunteerId(4));
        assert_eq!(o.status(), OrderStatus::Delivering);
        assert_eq!(o.driver(), Some(VolunteerId(4)));

        o.complete();
        assert_eq!(o.status(), OrderStatus::Completed);
        assert_eq!(o.collector(), Some(VolunteerId(1)));
        assert_eq!(o.driver(), Some(VolunteerId(4)));
    }

    #[test]
    fn status_labels() {
        assert_eq!(OrderStatus::Pending.to_string(), "PENDING");
        assert_eq!(OrderStatus::Completed.as_str(), "COMPLETED");
    }
}

#[cfg(test)]
mod customers {
    use super::*;

    #[test]
    fn order_cap_enforced() {
        let mut c = Customer::new(CustomerId(0), "ana", CustomerKind::Civilian, 4, 2);
        assert!(c.add_order(OrderId(0)).is_ok());
        assert!(c.add_order(OrderId(1)).is_ok());
        assert!(!c.can_make_order());
        assert!(c.add_order(OrderId(2)).is_err());
        assert_eq!(c.order_ids(), &[OrderId(0), OrderId(1)]);
        assert_eq!(c.orders_left(), 0);
    }

    #[test]
    fn zero_cap_customer_cannot_order() {
        let c = Customer::new(CustomerId(1), "bo", CustomerKind::Soldier, 1, 0);
        assert!(!c.can_make_order());
    }

    #[test]
    fn kind_parses() {
        assert_eq!("soldier".parse::<CustomerKind>().unwrap(), CustomerKind::Soldier);
        assert_eq!("civilian".parse::<CustomerKind>().unwrap(), CustomerKind::Civilian);
        assert!("pirate".parse::<CustomerKind>().is_err());
    }
}

#[cfg(test)]
mod collectors {
    use super::*;

    #[test]
    fn accepts_any_distance_when_idle() {
        let v = Volunteer::collector(VolunteerId(0), "c", 3);
        assert!(v.can_take_order(&order(0, 1_000_000)));
        assert_eq!(v.kind(), RoleKind::Collector);
    }

    #[test]
    fn cooldown_counts_down_to_completion() {
        let mut v = Volunteer::collector(VolunteerId(0), "c", 2);
        let o = order(7, 1);
        assert!(v.accept_order(&o));
        assert_eq!(v.time_left(), Some(2));

        assert_eq!(v.step(), None);
        assert_eq!(v.time_left(), Some(1));

        assert_eq!(v.step(), Some(OrderId(7)));
        assert!(!v.is_busy());
        assert_eq!(v.completed_order(), Some(OrderId(7)));
        assert_eq!(v.time_left(), None);
    }

    #[test]
    fn busy_collector_declines() {
        let mut v = Volunteer::collector(VolunteerId(0), "c", 2);
        assert!(v.accept_order(&order(0, 1)));
        let before = v.clone();
        assert!(!v.accept_order(&order(1, 1)));
        assert_eq!(v, before, "declined accept must not mutate");
    }

    #[test]
    fn idle_step_is_noop() {
        let mut v = Volunteer::collector(VolunteerId(0), "c", 2);
        let before = v.clone();
        assert_eq!(v.step(), None);
        assert_eq!(v, before);
    }

    #[test]
    fn zero_cooldown_finishes_on_first_step() {
        let mut v = Volunteer::collector(VolunteerId(0), "c", 0);
        assert!(v.accept_order(&order(2, 1)));
        assert_eq!(v.step(), Some(OrderId(2)));
    }

    #[test]
    fn limited_quota_exhausts_permanently() {
        let mut v = Volunteer::limited_collector(VolunteerId(0), "lc", 1, 2);
        assert_eq!(v.orders_left(), Some(2));
        assert!(v.accept_order(&order(0, 1)));
        assert_eq!(v.orders_left(), Some(1));
        v.step();
        assert!(v.accept_order(&order(1, 1)));
        assert_eq!(v.orders_left(), Some(0));
        v.step();
        assert!(!v.has_orders_left());
        assert!(!v.can_take_order(&order(2, 1)));
        assert_eq!(v.role_label(), "limited_collector");
    }
}

#[cfg(test)]
mod drivers {
    use super::*;

    #[test]
    fn distance_eligibility() {
        let v = Volunteer::driver(VolunteerId(0), "d", 10, 3);
        assert!(v.can_take_order(&order(0, 10)));
        assert!(!v.can_take_order(&order(1, 15)));
    }

    #[test]
    fn overshoot_finishes() {
        let mut v = Volunteer::driver(VolunteerId(0), "d", 10, 4);
        assert!(v.accept_order(&order(3, 10)));
        assert_eq!(v.time_left(), Some(10));
        assert_eq!(v.step(), None); // 6
        assert_eq!(v.step(), None); // 2
        assert_eq!(v.step(), Some(OrderId(3))); // -2 → done
        assert!(!v.is_busy());
    }

    #[test]
    fn limited_driver_quota() {
        let mut v = Volunteer::limited_driver(VolunteerId(0), "ld", 10, 10, 1);
        assert!(v.accept_order(&order(0, 5)));
        assert_eq!(v.step(), Some(OrderId(0)));
        assert!(!v.has_orders_left());
        assert!(!v.can_take_order(&order(1, 5)));
        assert_eq!(v.quota(), Quota::Limited { max_orders: 1, orders_left: 0 });
    }

    #[test]
    fn take_completed_consumes_matching_flag_only() {
        let mut v = Volunteer::driver(VolunteerId(0), "d", 10, 10);
        v.accept_order(&order(5, 3));
        v.step();
        assert!(!v.take_completed(OrderId(4)));
        assert!(v.take_completed(OrderId(5)));
        assert_eq!(v.completed_order(), None);
        assert!(!v.take_completed(OrderId(5)));
    }

    #[test]
    fn role_remaining() {
        let r = Role::driver(10, 2);
        assert_eq!(r.remaining(), 0);
        assert_eq!(r.kind(), RoleKind::Driver);
    }
}
