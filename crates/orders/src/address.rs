use serde::Serialize;

use pancakelab_core::ValueObject;

use crate::error::{OrderError, OrderResult};

/// Delivery address inside the lab: building and room number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    building: i64,
    room: i64,
}

impl Address {
    pub fn new(building: i64, room: i64) -> OrderResult<Self> {
        if building <= 0 {
            return Err(OrderError::invalid_address(
                "building number must be greater than 0",
            ));
        }
        if room <= 0 {
            return Err(OrderError::invalid_address(
                "room number must be greater than 0",
            ));
        }
        Ok(Self { building, room })
    }

    pub fn building(&self) -> i64 {
        self.building
    }

    pub fn room(&self) -> i64 {
        self.room
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "building {}, room {}", self.building, self.room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_numbers() {
        let address = Address::new(10, 20).unwrap();
        assert_eq!(address.building(), 10);
        assert_eq!(address.room(), 20);
        assert_eq!(address.to_string(), "building 10, room 20");
    }

    #[test]
    fn rejects_non_positive_building() {
        for building in [0, -1] {
            match Address::new(building, 1).unwrap_err() {
                OrderError::InvalidAddress(msg) if msg.contains("building") => {}
                other => panic!("Expected InvalidAddress, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_positive_room() {
        for room in [0, -1] {
            match Address::new(1, room).unwrap_err() {
                OrderError::InvalidAddress(msg) if msg.contains("room") => {}
                other => panic!("Expected InvalidAddress, got {other:?}"),
            }
        }
    }
}
