mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod page;
pub use page::Page;
