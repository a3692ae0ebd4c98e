//! One repository per table. Each method issues exactly one statement.

pub mod attachment_figure_repo;
pub mod descendant_attachment_repo;
pub mod descendant_repo;

pub use attachment_figure_repo::AttachmentFigureRepo;
pub use descendant_attachment_repo::DescendantAttachmentRepo;
pub use descendant_repo::DescendantRepo;
