//! Общие контракты фронтенда и бэкенда: доменные типы, DTO и чистая логика
//! (фильтр каталога, расчёт стоимости, валидация форм).

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
