pub mod http_image_service;
