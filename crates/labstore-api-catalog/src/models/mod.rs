//! Request and response models for the catalog API.

mod requests;
mod responses;

pub use requests::{
    CreateCategoryRequest, CreateProductRequest, ListProductsQuery, UpdateCategoryRequest,
    UpdateProductRequest,
};
pub use responses::{CategoryDetailResponse, CategoryListEntry, DeletedResponse, ProductResponse};
