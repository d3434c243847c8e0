//! Data Models
//!
//! 持久化文档与 API 共用的数据模型，按资源一个文件。

pub mod product;
pub mod purchase_order;
pub mod refund;
pub mod sale;
pub mod schedule;
pub mod store_info;
pub mod supplier;
pub mod work_day;

pub use product::{LowStockReport, Product, ProductCreate, ProductUpdate, RestockRequest};
pub use purchase_order::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderLine, PurchaseOrderLineInput,
    PurchaseOrderStatus, PurchaseOrderStatusUpdate,
};
pub use refund::{Refund, RefundCreate, RefundStatus, RefundStatusUpdate};
pub use sale::{Customer, Sale, SaleCreate, SaleItemInput, SaleLine, SaleReceipt, SaleStats, SaleStatus};
pub use schedule::{ScheduleConfig, ScheduleUpdate};
pub use store_info::{AdminAccount, PasswordChange, StoreInfo, StoreInfoUpdate};
pub use supplier::{Supplier, SupplierCreate, SupplierUpdate};
pub use work_day::{DayStatus, DayStatusReport, WorkDay, WorkDayDetail};
