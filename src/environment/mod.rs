mod atmosphere;

pub use atmosphere::AtmosphericState;
