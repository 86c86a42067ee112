//! Command Layer
//!
//! Thin async wrappers over `AppState`, the boundary a UI shell calls.
//! Errors cross this boundary as strings.

mod garment_cmd;
mod outfit_cmd;
mod stylist_cmd;

pub use garment_cmd::{
    create_garment, delete_garment, get_garment, list_garments, list_garments_by_category,
    update_garment,
};
pub use outfit_cmd::{
    delete_outfit, list_favorite_outfits, list_outfits, load_outfit, mark_outfit_worn,
    save_outfit, set_outfit_favorite,
};
pub use stylist_cmd::recommend_outfit;
