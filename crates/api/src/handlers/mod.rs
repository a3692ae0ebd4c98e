pub mod attachment_figure;
pub mod attachment_join;
pub mod descendant;
