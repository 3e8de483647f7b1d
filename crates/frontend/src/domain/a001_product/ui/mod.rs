pub mod add;
pub mod list;
pub mod manage;
pub mod picker;

pub use add::AddProduct;
pub use list::ProductList;
pub use manage::ManageProducts;
pub use picker::ProductPicker;
