//! Template file contents
//!
//! Rendered with handlebars. Namespace separators directly in front of an
//! expression would escape it, so such imports are passed in as whole values
//! (see `model_import`).

/// Repository interface template
pub const REPOSITORY_INTERFACE: &str = r"<?php

namespace App\Interface\IRepo;

interface I{{class_name}}Repo extends IGenericRepo
{
    // Add custom repository methods here
}
";

/// Repository template
pub const REPOSITORY: &str = r"<?php

namespace App\Repo;

use App\Interface\IRepo\I{{class_name}}Repo;
use {{model_import}};

class {{class_name}}Repo extends GenericRepo implements I{{class_name}}Repo
{
    public function __construct()
    {
        parent::__construct({{class_name}}::class);
    }

    /**
     * Define allowed filters for the query builder
     * @return array
     */
    protected function getAllowedFilters(): array
    {
        return [
            // Add model-specific filters here
            // Example: AllowedFilter::exact('status'),
            // Example: AllowedFilter::partial('name'),
        ];
    }

    /**
     * Define allowed sorts for the query builder
     * @return array
     */
    protected function getAllowedSorts(): array
    {
        return [
            'created_at',
            'updated_at',
            // Add other model-specific sortable fields
        ];
    }

    /**
     * Define allowed includes for the query builder
     * @return array
     */
    protected function getAllowedIncludes(): array
    {
        return [
            // Add model-specific relationships here
            // Example: 'departments', 'buildings', 'students'
        ];
    }
}
";

/// Service interface template
pub const SERVICE_INTERFACE: &str = r"<?php

namespace App\Interface\IService;

interface I{{class_name}}Service extends IGenericService
{
    // Add custom service methods here
}
";

/// Service template
pub const SERVICE: &str = r"<?php

namespace App\Service;

use App\Interface\IService\I{{class_name}}Service;
use App\Interface\IRepo\I{{class_name}}Repo;

class {{class_name}}Service extends GenericService implements I{{class_name}}Service
{
    public function __construct(I{{class_name}}Repo ${{repository_param}})
    {
        parent::__construct(${{repository_param}});
    }
}
";
