use ojc_core::ir::TypeDescriptor;

/// Map a type descriptor to the type name used in JSDoc annotations.
pub fn descriptor_to_doc(descriptor: &TypeDescriptor) -> String {
    match descriptor {
        TypeDescriptor::String => "string".to_string(),
        TypeDescriptor::Number => "number".to_string(),
        TypeDescriptor::Boolean => "boolean".to_string(),
        TypeDescriptor::Null => "null".to_string(),
        TypeDescriptor::Array(inner) => format!("Array<{}>", descriptor_to_doc(inner)),
        TypeDescriptor::Object(fields) => {
            let field_strs: Vec<String> = fields
                .iter()
                .map(|field| {
                    let doc_type = descriptor_to_doc(&field.field_type);
                    if field.required {
                        format!("{}: {}", field.name, doc_type)
                    } else {
                        format!("{}?: {}", field.name, doc_type)
                    }
                })
                .collect();
            format!("{{{}}}", field_strs.join(", "))
        }
        TypeDescriptor::AnyObject => "object".to_string(),
        TypeDescriptor::Unknown => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ojc_core::ir::FieldDescriptor;

    #[test]
    fn test_primitives() {
        assert_eq!(descriptor_to_doc(&TypeDescriptor::String), "string");
        assert_eq!(descriptor_to_doc(&TypeDescriptor::Number), "number");
        assert_eq!(descriptor_to_doc(&TypeDescriptor::Boolean), "boolean");
        assert_eq!(descriptor_to_doc(&TypeDescriptor::Null), "null");
        assert_eq!(descriptor_to_doc(&TypeDescriptor::AnyObject), "object");
        assert_eq!(descriptor_to_doc(&TypeDescriptor::Unknown), "unknown");
    }

    #[test]
    fn test_array() {
        assert_eq!(
            descriptor_to_doc(&TypeDescriptor::Array(Box::new(TypeDescriptor::Number))),
            "Array<number>"
        );
        assert_eq!(
            descriptor_to_doc(&TypeDescriptor::Array(Box::new(TypeDescriptor::Array(
                Box::new(TypeDescriptor::String)
            )))),
            "Array<Array<string>>"
        );
    }

    #[test]
    fn test_record() {
        let record = TypeDescriptor::Object(vec![
            FieldDescriptor {
                name: "id".to_string(),
                field_type: TypeDescriptor::Number,
                required: true,
            },
            FieldDescriptor {
                name: "createdAt".to_string(),
                field_type: TypeDescriptor::String,
                required: false,
            },
        ]);
        assert_eq!(descriptor_to_doc(&record), "{id: number, createdAt?: string}");
    }
}
