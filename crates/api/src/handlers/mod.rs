pub mod auth;
pub mod bills;
pub mod documents;
pub mod emergency;
pub mod facilities;
pub mod household;
pub mod notices;
pub mod parking;
pub mod polls;
pub mod staff;
pub mod tickets;
pub mod units;
pub mod users;
pub mod vendors;
pub mod visitors;
