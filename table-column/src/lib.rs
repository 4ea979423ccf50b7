pub mod column;
pub mod config;
pub mod error;
pub mod instance;
pub mod node;
pub mod owner;
pub mod state;
pub mod store;
pub mod style;

pub use column::{ColumnConfig, ColumnProps, TableColumn};
pub use error::ColumnError;
pub use node::Node;

pub mod prelude {
    pub use crate::column::{
        Align, CellScope, ColumnConfig, ColumnProps, ColumnSlots, ColumnType, HeaderScope,
        RegisterContext, RenderCell, RenderHeader, SubColumnRegistrar, TableColumn,
    };
    pub use crate::config::RenderConfig;
    pub use crate::error::ColumnError;
    pub use crate::instance::InstanceId;
    pub use crate::node::{Element, Node};
    pub use crate::owner::TableOwner;
    pub use crate::state::{Memo, State};
    pub use crate::store::{TableStore, TreeData, TreeNode};
    pub use crate::style::{Namespace, Style};
}
