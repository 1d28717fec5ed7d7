pub mod labels;
pub mod menu_tree;

pub use labels::{fallback_label, LinkLabelService};
pub use menu_tree::{
    build_forest, collect_subtree, filter_active, plan_sibling_drop, would_create_cycle,
    MenuTreeData, MenuTreeService,
};
