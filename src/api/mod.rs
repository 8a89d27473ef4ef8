/*
 * Responsibility
 * - API のバージョンごとの束ね
 */
pub mod v1;
