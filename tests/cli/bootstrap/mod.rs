mod config_file_contract;
mod install_contract;
mod uploads_dir_contract;
