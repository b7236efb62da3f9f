pub mod callback_url_generator;
