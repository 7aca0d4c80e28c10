//! Pure data structures (DTOs), some of them implementing the
//! [`ActorEntity`](shop_framework::ActorEntity) trait.

pub mod order;
pub mod order_product;
pub mod product;

pub use order::*;
pub use order_product::*;
pub use product::*;
