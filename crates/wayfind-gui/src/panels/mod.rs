pub mod ar_view;
pub mod bottom_sheet;
pub mod info_card;
pub mod map;
pub mod menu_bar;
