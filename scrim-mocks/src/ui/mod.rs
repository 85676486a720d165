//! Small UI pieces shared by the mock pages

mod link_card;

pub use link_card::LinkCard;
