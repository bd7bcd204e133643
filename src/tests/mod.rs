mod filter_props;
mod utils;
