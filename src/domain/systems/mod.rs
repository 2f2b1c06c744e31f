// Frame-independent helpers shared by the entities and the frame driver.

pub mod animation;
pub mod collision;
