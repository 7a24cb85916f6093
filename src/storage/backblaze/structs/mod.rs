pub mod backblaze_authorize_account_response;
pub mod backblaze_upload_file_response;
pub mod backblaze_upload_url_response;
