pub mod attach;
pub mod complaint_form;
pub mod project_detail;
pub mod project_list;

pub use attach::{attach_page, AttachVm};
pub use complaint_form::{complaint_form_page, ComplaintFormVm};
pub use project_detail::project_detail_page;
pub use project_list::{project_list_page, ProjectListVm};
