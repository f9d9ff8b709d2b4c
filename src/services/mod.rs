pub mod bot_init;
