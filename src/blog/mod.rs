/*
 * Responsibility
 * - ブログページ (GET /) の描画まわり
 * - document / content / theme / components / page を束ね、handler を公開する
 */
pub mod components;
pub mod content;
pub mod document;
mod handlers;
mod html;
pub mod page;
pub mod theme;

pub use handlers::routes;
