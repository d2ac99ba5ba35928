pub mod allocator;
pub mod priority;

#[doc(inline)]
pub use allocator::RGFAllocator;
#[doc(inline)]
pub use priority::priority_order;
