mod intent;
mod reducer;
mod state;

pub use intent::SalesIntent;
pub use reducer::SalesReducer;
pub use state::SalesState;
