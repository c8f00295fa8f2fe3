pub use super::ad_request::Entity as AdRequest;
pub use super::content::Entity as Content;
pub use super::price_conflict_group::Entity as PriceConflictGroup;
pub use super::purchase::Entity as Purchase;
pub use super::user::Entity as User;
pub use super::website::Entity as Website;
pub use super::website_url_claim::Entity as WebsiteUrlClaim;
pub use super::wishlist_item::Entity as WishlistItem;
