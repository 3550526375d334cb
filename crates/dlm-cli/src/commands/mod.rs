pub mod dispatch;
pub mod docs;
pub mod example;
pub mod html;
pub mod lint;
pub mod normalize;
pub mod push;
