//! Database Models
//!
//! Serde models matching the SurrealDB tables, plus the create/update
//! payloads the API handlers accept.

pub mod serde_helpers;

pub mod dining_table;
pub mod menu_item;
pub mod reservation;
pub mod testimonial;

pub use dining_table::{
    DiningTable, DiningTableAvailability, DiningTableCreate, DiningTableId, DiningTableUpdate,
    SeatingType,
};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use reservation::{
    Reservation, ReservationCreate, ReservationDetail, ReservationFilter, ReservationId,
};
pub use testimonial::{Testimonial, TestimonialCreate};
