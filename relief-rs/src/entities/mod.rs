mod instance;
mod item;
mod load_plan;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use item::PrioritizedItem;
#[doc(inline)]
pub use load_plan::LoadPlan;
#[doc(inline)]
pub use load_plan::LoadPlanEntry;
