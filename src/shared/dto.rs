// Requests
pub mod create_task_request;
pub mod update_task_request;


// Responses
pub mod task_delete_response;
pub mod validation_error_response;
