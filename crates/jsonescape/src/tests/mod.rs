mod property_json;
