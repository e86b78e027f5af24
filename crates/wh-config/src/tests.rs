//! Unit tests for wh-config.

use std::io::Cursor;

use wh_core::{CustomerId, VolunteerId};
use wh_model::{CustomerKind, Quota, RoleKind};

use crate::{ConfigError, load_config_reader};

const SAMPLE: &str = "\
# warehouse setup
customer Moshe soldier 3 2
customer Ron civilian 7 1

volunteer Tamar collector 2
volunteer Ng limited_collector 3 2
volunteer Din driver 10 4
volunteer Jay limited_driver 7 3 1
";

fn load(text: &str) -> Result<crate::WarehouseSetup, ConfigError> {
    load_config_reader(Cursor::new(text.as_bytes()))
}

#[cfg(test)]
mod valid_input {
    use super::*;

    #[test]
    fn loads_all_entities_in_order() {
        let setup = load(SAMPLE).unwrap();
        assert_eq!(setup.customers.len(), 2);
        assert_eq!(setup.volunteers.len(), 4);

        let ron = &setup.customers[1];
        assert_eq!(ron.id, CustomerId(1));
        assert_eq!(ron.name, "Ron");
        assert_eq!(ron.kind, CustomerKind::Civilian);
        assert_eq!(ron.distance, 7);
        assert_eq!(ron.max_orders, 1);
    }

    #[test]
    fn volunteer_ids_are_sequential_and_roles_match() {
        let setup = load(SAMPLE).unwrap();
        let ids: Vec<_> = setup.volunteers.iter().map(|v| v.id).collect();
        assert_eq!(ids, [VolunteerId(0), VolunteerId(1), VolunteerId(2), VolunteerId(3)]);

        let labels: Vec<_> = setup.volunteers.iter().map(|v| v.role_label()).collect();
        assert_eq!(labels, ["collector", "limited_collector", "driver", "limited_driver"]);

        assert_eq!(setup.volunteers[1].quota(), Quota::limited(2));
        assert_eq!(setup.volunteers[3].kind(), RoleKind::Driver);
        assert_eq!(setup.volunteers[3].orders_left(), Some(1));
    }

    #[test]
    fn extra_spaces_are_tolerated() {
        let setup = load("customer   Dana  soldier  4   3\n").unwrap();
        assert_eq!(setup.customers[0].name, "Dana");
        assert_eq!(setup.customers[0].max_orders, 3);
    }

    #[test]
    fn empty_input_is_empty_setup() {
        let setup = load("").unwrap();
        assert!(setup.customers.is_empty());
        assert!(setup.volunteers.is_empty());
    }

    #[test]
    fn trailing_tokens_ignored() {
        let setup = load("volunteer Tamar collector 2 99\n").unwrap();
        assert_eq!(setup.volunteers.len(), 1);
    }
}

#[cfg(test)]
mod invalid_input {
    use super::*;

    fn parse_line_of(err: ConfigError) -> u64 {
        match err {
            ConfigError::Parse { line, .. } => line,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_role_reports_line() {
        let err = load("customer A soldier 1 1\nvolunteer B pilot 3\n").unwrap_err();
        assert_eq!(parse_line_of(err), 2);
    }

    #[test]
    fn unknown_entry_kind() {
        assert!(load("warehouse big\n").is_err());
    }

    #[test]
    fn unknown_customer_kind() {
        assert!(load("customer A pirate 1 1\n").is_err());
    }

    #[test]
    fn missing_parameter() {
        assert!(load("volunteer B limited_driver 7 3\n").is_err());
        assert!(load("volunteer B\n").is_err());
    }

    #[test]
    fn non_numeric_parameter() {
        assert!(load("customer A soldier far 1\n").is_err());
        assert!(load("volunteer B collector -2\n").is_err());
    }

    #[test]
    fn zero_speed_driver_rejected() {
        assert!(load("volunteer B driver 10 0\n").is_err());
    }
}
