//! different utility modules used throughout the project
/// tiny module to save the sampled curve into file
pub mod logger;
/// terminal and file logging setup (simplelog)
pub mod log_setup;
/// plot of the equation with its real roots highlighted
pub mod plots;
/// pretty-printing of the solution set as a table
pub mod roots_table;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
