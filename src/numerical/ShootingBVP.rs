pub mod Shooting_driver;
