mod integration_client_renderer;
mod unit_io_path_verification;
